use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

use calc::PricingConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PRICE_PER_BARREL: u32 = calc::config::DEFAULT_PRICE_PER_BARREL;
const DEFAULT_INVESTOR_EQUITY_PCT: f64 = 5.0;
const DEFAULT_STRESS_OPEX_THRESHOLD: u32 = calc::config::DEFAULT_STRESS_OPEX_THRESHOLD;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub price_per_barrel: u32,
    pub investor_equity_pct: f64,
    pub stress_opex_threshold: u32,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidPricePerBarrel,
    InvalidInvestorEquityPct,
    InvalidStressOpexThreshold,
    NonUnicodeListenAddr,
    NonUnicodePricePerBarrel,
    NonUnicodeInvestorEquityPct,
    NonUnicodeStressOpexThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "REFINERY_SERVER_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidPricePerBarrel => {
                write!(f, "REFINERY_PRICE_PER_BARREL must be a positive whole number")
            }
            Self::InvalidInvestorEquityPct => {
                write!(
                    f,
                    "REFINERY_INVESTOR_EQUITY_PCT must be a finite percentage between 0 and 100"
                )
            }
            Self::InvalidStressOpexThreshold => {
                write!(f, "REFINERY_STRESS_OPEX_THRESHOLD must be a whole number")
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "REFINERY_SERVER_ADDR contains non-unicode data")
            }
            Self::NonUnicodePricePerBarrel => {
                write!(f, "REFINERY_PRICE_PER_BARREL contains non-unicode data")
            }
            Self::NonUnicodeInvestorEquityPct => {
                write!(f, "REFINERY_INVESTOR_EQUITY_PCT contains non-unicode data")
            }
            Self::NonUnicodeStressOpexThreshold => {
                write!(f, "REFINERY_STRESS_OPEX_THRESHOLD contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            _ => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("REFINERY_SERVER_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let price_per_barrel = match env::var("REFINERY_PRICE_PER_BARREL") {
            Ok(value) => match value.trim().parse::<u32>() {
                Ok(price) if price > 0 => price,
                _ => return Err(ConfigError::InvalidPricePerBarrel),
            },
            Err(env::VarError::NotPresent) => DEFAULT_PRICE_PER_BARREL,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodePricePerBarrel);
            }
        };

        let investor_equity_pct = match env::var("REFINERY_INVESTOR_EQUITY_PCT") {
            Ok(value) => parse_percentage(value.as_str())
                .ok_or(ConfigError::InvalidInvestorEquityPct)?,
            Err(env::VarError::NotPresent) => DEFAULT_INVESTOR_EQUITY_PCT,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeInvestorEquityPct);
            }
        };

        let stress_opex_threshold = match env::var("REFINERY_STRESS_OPEX_THRESHOLD") {
            Ok(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidStressOpexThreshold)?,
            Err(env::VarError::NotPresent) => DEFAULT_STRESS_OPEX_THRESHOLD,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeStressOpexThreshold);
            }
        };

        Ok(Self {
            listen_addr,
            price_per_barrel,
            investor_equity_pct,
            stress_opex_threshold,
        })
    }

    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            price_per_barrel: self.price_per_barrel,
            investor_equity_fraction: self.investor_equity_pct / 100.0,
            stress_opex_threshold: self.stress_opex_threshold,
        }
    }
}

fn parse_percentage(value: &str) -> Option<f64> {
    let parsed = value.trim().parse::<f64>().ok()?;
    if !parsed.is_finite() || parsed <= 0.0 || parsed > 100.0 {
        return None;
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use std::{env, sync::Mutex};

    use super::{Config, ConfigError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());
    const ENV_ADDR_KEY: &str = "REFINERY_SERVER_ADDR";
    const ENV_PRICE_KEY: &str = "REFINERY_PRICE_PER_BARREL";
    const ENV_EQUITY_KEY: &str = "REFINERY_INVESTOR_EQUITY_PCT";
    const ENV_STRESS_KEY: &str = "REFINERY_STRESS_OPEX_THRESHOLD";

    struct EnvVarGuard {
        key: &'static str,
        previous: Option<std::ffi::OsString>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }

        fn unset(key: &'static str) -> Self {
            let previous = env::var_os(key);
            env::remove_var(key);
            Self { key, previous }
        }

        #[cfg(unix)]
        fn set_os(key: &'static str, value: std::ffi::OsString) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }

    fn reset_config_env_baseline() -> [EnvVarGuard; 4] {
        [
            EnvVarGuard::unset(ENV_ADDR_KEY),
            EnvVarGuard::unset(ENV_PRICE_KEY),
            EnvVarGuard::unset(ENV_EQUITY_KEY),
            EnvVarGuard::unset(ENV_STRESS_KEY),
        ]
    }

    #[test]
    fn defaults_apply_when_env_is_unset() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.price_per_barrel, 60);
        assert_eq!(config.investor_equity_pct, 5.0);
        assert_eq!(config.stress_opex_threshold, 45);
        assert_eq!(config.pricing(), calc::PricingConfig::default());
    }

    #[test]
    fn uses_listen_address_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ADDR_KEY, "127.0.0.1:9000");

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn returns_error_for_invalid_listen_address() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ADDR_KEY, "not-an-address");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidListenAddr(_)));
    }

    #[test]
    fn pricing_overrides_flow_into_calculator_config() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _price = EnvVarGuard::set(ENV_PRICE_KEY, "75");
        let _equity = EnvVarGuard::set(ENV_EQUITY_KEY, "10");
        let _stress = EnvVarGuard::set(ENV_STRESS_KEY, "50");

        let pricing = Config::from_env().unwrap().pricing();

        assert_eq!(pricing.price_per_barrel, 75);
        assert_eq!(pricing.investor_equity_fraction, 0.1);
        assert_eq!(pricing.stress_opex_threshold, 50);
    }

    #[test]
    fn returns_error_for_zero_price() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_PRICE_KEY, "0");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPricePerBarrel));
    }

    #[test]
    fn returns_error_for_fractional_price() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_PRICE_KEY, "60.5");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPricePerBarrel));
    }

    #[test]
    fn returns_error_for_out_of_range_equity_pct() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        for value in ["0", "-5", "100.5", "NaN", "five"] {
            let _guard = EnvVarGuard::set(ENV_EQUITY_KEY, value);
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidInvestorEquityPct), "{value}");
        }
    }

    #[test]
    fn returns_error_for_negative_stress_threshold() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_STRESS_KEY, "-1");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidStressOpexThreshold));
    }

    #[cfg(unix)]
    #[test]
    fn returns_error_for_non_unicode_price() {
        use std::os::unix::ffi::OsStringExt;

        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set_os(ENV_PRICE_KEY, std::ffi::OsString::from_vec(vec![0x66, 0x80]));

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::NonUnicodePricePerBarrel));
    }

    #[test]
    fn error_messages_name_the_variable() {
        assert!(ConfigError::InvalidInvestorEquityPct
            .to_string()
            .starts_with("REFINERY_INVESTOR_EQUITY_PCT"));
        assert!(ConfigError::NonUnicodeListenAddr
            .to_string()
            .starts_with("REFINERY_SERVER_ADDR"));
    }
}
