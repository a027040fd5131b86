pub mod record_converter;
pub mod record_type_map;
pub mod server;

pub use record_converter::RecordConverter;
pub use record_type_map::RecordTypeMapper;
pub use server::LiteralRequestHandler;
