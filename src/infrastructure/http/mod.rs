pub mod dto;
pub mod supabase_rest_client;

pub use supabase_rest_client::{SupabaseConfig, SupabaseRestClient};
