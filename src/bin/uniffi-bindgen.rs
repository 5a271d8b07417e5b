// Runs uniffi-bindgen against the compiled library to produce Kotlin bindings.
fn main() {
    uniffi::uniffi_bindgen_main()
}
