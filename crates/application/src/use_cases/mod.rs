pub mod dns;

pub use dns::ResolveLiteralUseCase;
