pub mod fetch;
pub mod prepare;
pub mod publish;
