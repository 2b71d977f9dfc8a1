//! Output formatting utilities.
//! 输出格式化工具。
//!
//! Status lines go to stderr so the tree or token listing on stdout stays
//! clean for piping.
//! 状态信息输出到 stderr，使 stdout 上的语法树或 token 列表便于管道处理。

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    eprintln!("\x1b[32m{msg}\x1b[0m");
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str) {
    eprintln!("\x1b[34minfo:\x1b[0m {msg}");
}
