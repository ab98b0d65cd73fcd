pub mod user_api_client;
