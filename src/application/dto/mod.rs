pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod pagination;
pub mod users;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use comments::CommentDto;
pub use pagination::PaginatedResult;
pub use users::UserDto;
