pub mod product_request;
pub mod product_response;

pub use product_request::ProductRequest;
pub use product_response::ProductDto;
