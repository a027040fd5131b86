use super::record_converter::RecordConverter;
use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Header, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use literal_dns_application::use_cases::ResolveLiteralUseCase;
use literal_dns_domain::LiteralQuery;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// hickory-server entry point: one call per inbound question.
#[derive(Clone)]
pub struct LiteralRequestHandler {
    use_case: Arc<ResolveLiteralUseCase>,
}

impl LiteralRequestHandler {
    pub fn new(use_case: Arc<ResolveLiteralUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for LiteralRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                warn!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let record_type = RecordTypeMapper::from_hickory(query.query_type());
        // `name()` is lowercased; answers echo the name as asked.
        let literal_query =
            LiteralQuery::new(query.original().name().to_string(), record_type);
        let client_ip = request.src().ip();

        debug!(
            name = %literal_query.name,
            record_type = %record_type,
            client = %client_ip,
            "DNS query received"
        );

        let reply = match self.use_case.execute(&literal_query) {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, name = %literal_query.name, "Query resolution failed");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let answers = match RecordConverter::to_records(&reply) {
            Ok(answers) => answers,
            Err(e) => {
                error!(error = %e, name = %literal_query.name, "Failed to build answer records");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        debug!(
            name = %literal_query.name,
            code = reply.code.as_str(),
            answers = answers.len(),
            "Sending response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(reply.authoritative);
        header.set_response_code(RecordConverter::response_code(reply.code));
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.error_msg(request.header(), code);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
