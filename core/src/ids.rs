use crate::types::User;

/// Next id for a locally created record: one past the largest id in
/// `existing`, or `1` for an empty slice. Collisions are not checked.
pub fn generate_user_id(existing: &[User]) -> u64 {
    existing.iter().map(|user| user.id).max().unwrap_or(0) + 1
}
