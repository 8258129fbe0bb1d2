pub mod slack_payload;
