fn main() {
    // napi linker setup only when the node addon surface is enabled.
    if std::env::var_os("CARGO_FEATURE_NAPI").is_some() {
        napi_build::setup();
    }
}
