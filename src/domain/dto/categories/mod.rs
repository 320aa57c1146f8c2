pub mod category_request;
pub mod category_response;

pub use category_request::CategoryRequest;
pub use category_response::CategoryDto;
