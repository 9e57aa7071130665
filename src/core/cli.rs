use std::path::PathBuf;

/// File locations for a CLI session: course catalog, operation plan, config
/// and log directory. Positional catalog/plan, flags for the rest.
#[derive(Debug, Clone)]
pub struct CliPaths {
    pub catalog_path: PathBuf,
    pub plan_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut catalog_path = None;
        let mut plan_path = None;
        let mut config_path = PathBuf::from("config.json");
        let mut logs_dir = PathBuf::from("logs");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    config_path = Self::next_path(&mut args, "--config")?;
                }
                "--logs" => {
                    logs_dir = Self::next_path(&mut args, "--logs")?;
                }
                _ if arg.starts_with('-') => return Err(format!("Unknown argument: {arg}")),
                _ if catalog_path.is_none() => catalog_path = Some(PathBuf::from(arg)),
                _ if plan_path.is_none() => plan_path = Some(PathBuf::from(arg)),
                _ => return Err(format!("Unexpected argument: {arg}")),
            }
        }

        Ok(Self {
            catalog_path: catalog_path.ok_or_else(Self::usage)?,
            plan_path: plan_path.ok_or_else(Self::usage)?,
            config_path,
            logs_dir,
        })
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .map(PathBuf::from)
            .ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn usage() -> String {
        "Usage: sugang <catalog.json> <plan.json> [--config config.json] [--logs logs]".to_string()
    }
}
