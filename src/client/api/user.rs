use crate::{client::model::error::ApiError, model::user::PaginatedUsersDto};

use super::helper::{get, parse_response, send_request};

/// Get paginated registered users, admin only
pub async fn get_all_users(page: u64, per_page: u64) -> Result<PaginatedUsersDto, ApiError> {
    let url = format!("/api/admin/users?page={}&entries={}", page, per_page);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
