pub mod applier;
pub mod command;
pub mod external;
pub mod parser;
pub mod source;
