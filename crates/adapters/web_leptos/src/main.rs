fn main() {
    console_error_panic_hook::set_once();
    folio_adapter_web_leptos::start();
}
