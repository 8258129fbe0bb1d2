pub mod patch_logger;
