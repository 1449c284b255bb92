//! authdns Domain Layer
pub mod config;
pub mod dns_header;
pub mod dns_message;
pub mod dns_name;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod op_code;
pub mod response_code;

pub use config::{AnswerConfig, CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig};
pub use dns_header::{Header, HeaderFlags};
pub use dns_message::Message;
pub use dns_name::{DomainName, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use dns_question::Question;
pub use dns_record::{RecordClass, RecordType, ResourceRecord};
pub use errors::{DomainError, WireError};
pub use op_code::OpCode;
pub use response_code::ResponseCode;
