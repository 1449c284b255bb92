use authdns_application::services::SyntheticAnswerSource;
use authdns_application::use_cases::AnswerQueryUseCase;
use authdns_domain::Config;
use authdns_infrastructure::dns::{DnsServerHandler, MessageAssembler};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        info!(
            address = %config.answer.address,
            ttl = config.answer.ttl,
            "Synthesizing A answers"
        );

        let source = Arc::new(SyntheticAnswerSource::from_config(&config.answer));
        let use_case = Arc::new(AnswerQueryUseCase::new(source));
        let assembler = MessageAssembler::new(use_case);
        let handler = DnsServerHandler::new(assembler).with_packet_dump(config.logging.dump_packets);

        Self {
            handler: Arc::new(handler),
        }
    }
}
