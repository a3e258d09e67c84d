pub mod app_loop;
pub mod seed;
pub mod settings_file;

pub const APP_NAME: &str = "Mazeweave";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
