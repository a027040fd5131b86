mod resolve_literal;

pub use resolve_literal::ResolveLiteralUseCase;
