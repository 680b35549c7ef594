#[macro_export]
macro_rules! env_lazy {
    ($( $vis:vis $name:ident : $ty:ty = ($key:literal, $default:expr); )* ) => {
        $(
            $vis static $name: ::std::sync::LazyLock<$ty> = ::std::sync::LazyLock::new(|| {
                $crate::libs::config::load_env();
                $crate::libs::config::Config::get_var_t::<$ty>($key, $default)
            });
        )*
    };
}

env_lazy! {
    pub NETWORK: String          = ("CELOSCAN_NETWORK", "mainnet".to_string());
    pub EXPLORER_URL: String     = ("CELOSCAN_URL", String::new());
    pub MAX_IDLE: usize          = ("CELOSCAN_MAX_IDLE", 100);
    pub IDLE_TIMEOUT_SECS: u64   = ("CELOSCAN_IDLE_TIMEOUT_SECS", 30);
    pub TIMEOUT_SECS: u64        = ("CELOSCAN_TIMEOUT_SECS", 0);
    pub LOG_LEVEL: String        = ("CELOSCAN_LOG_LEVEL", "info".to_string());
}

pub const CELO_DECIMALS: u32 = 18;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
