pub mod net;
pub mod process;
pub mod queue;
pub mod report;
pub mod sim;

#[cfg(test)]
mod test;
