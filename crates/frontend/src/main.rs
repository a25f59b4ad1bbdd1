fn main() {
    match history_guard_frontend::start() {
        Ok(handle) => handle.forget(),
        Err(err) => tracing::error!(error = %err, "History guard not installed"),
    }
}
