/// Readable panics in the Workers log
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
