//! Integration test harness. Each module exercises one API domain
//! against a real Postgres database.

mod helpers;

mod admin_test;
mod auth_test;
mod creator_test;
mod kyc_test;
mod message_test;
mod payout_test;
mod subscription_test;
