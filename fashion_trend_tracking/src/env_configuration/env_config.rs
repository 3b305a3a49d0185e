use crate::common::*;

#[doc = r#"
    Reads an environment variable and treats a missing value as a fatal error.

    The server cannot start without its configuration file, so a missing key is
    logged at error level and the process panics immediately.

    # Arguments
    * `key` - Name of the environment variable

    # Returns
    * `String` - Value of the environment variable

    # Panics
    When the environment variable is not set
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the TOML server configuration, read from `SERVER_CONFIG_PATH` on first access.

    The file holds the listen address, the year ranges and generation mode of the
    mock trend data, the image output directory and the HTML template locations.

    # Panics
    When `SERVER_CONFIG_PATH` is not set
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = "URL prefix under which the image output directory is served"]
pub const STATIC_URL_PREFIX: &str = "static";
