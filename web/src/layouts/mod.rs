pub mod authenticated;
pub mod fullpage;
