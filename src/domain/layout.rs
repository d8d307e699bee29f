//! Remote filesystem layout and command strings
//!
//! Every shell command zeroops sends to a target is built here, so the
//! orchestrators only deal in "ensure dir", "bring up", "reload" and so on.

/// File name of the rendered manifest on the remote host
pub const REMOTE_MANIFEST_NAME: &str = "docker-compose.yml";

/// File name of the environment file on the remote host
pub const REMOTE_ENV_NAME: &str = ".env";

/// Remote paths and command vocabulary for one target host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLayout {
    /// Parent of every app directory (`/apps`)
    pub apps_root: String,
    /// Directory holding one proxy fragment per app
    pub sites_dir: String,
    /// Location the transfer identity can always write to
    pub staging_dir: String,
    /// Prefix privileged commands with `sudo`
    pub sudo: bool,
    pub compose_command: String,
    pub reload_command: String,
}

impl Default for RemoteLayout {
    fn default() -> Self {
        Self {
            apps_root: "/apps".to_string(),
            sites_dir: "/etc/nginx/sites-enabled".to_string(),
            staging_dir: "/tmp".to_string(),
            sudo: true,
            compose_command: "docker compose".to_string(),
            reload_command: "nginx -s reload".to_string(),
        }
    }
}

impl RemoteLayout {
    pub fn app_dir(&self, app: &str) -> String {
        join(&self.apps_root, app)
    }

    pub fn manifest_path(&self, app: &str) -> String {
        join(&self.app_dir(app), REMOTE_MANIFEST_NAME)
    }

    pub fn env_path(&self, app: &str) -> String {
        join(&self.app_dir(app), REMOTE_ENV_NAME)
    }

    pub fn proxy_entry(&self, app: &str) -> String {
        join(&self.sites_dir, app)
    }

    /// Staging path for one file of one app
    pub fn staging_path(&self, app: &str, file_name: &str) -> String {
        let file_name = file_name.trim_start_matches('.');
        join(&self.staging_dir, &format!("zeroops-{}-{}", app, file_name))
    }

    fn privileged(&self, command: &str) -> String {
        if self.sudo {
            format!("sudo {}", command)
        } else {
            command.to_string()
        }
    }

    pub fn ensure_app_dir(&self, app: &str) -> String {
        self.privileged(&format!("mkdir -p {}", shell_quote(&self.app_dir(app))))
    }

    pub fn compose_up(&self, app: &str) -> String {
        format!(
            "cd {} && {}",
            shell_quote(&self.app_dir(app)),
            self.privileged(&format!("{} up --build -d", self.compose_command))
        )
    }

    pub fn compose_ps(&self, app: &str) -> String {
        format!(
            "cd {} && {}",
            shell_quote(&self.app_dir(app)),
            self.privileged(&format!("{} ps", self.compose_command))
        )
    }

    /// Stop the app's containers and delete its directory
    pub fn compose_down(&self, app: &str) -> String {
        format!(
            "{} && {}",
            self.privileged(&format!(
                "{} -f {} down",
                self.compose_command,
                shell_quote(&self.manifest_path(app))
            )),
            self.remove_app_dir(app)
        )
    }

    pub fn remove_app_dir(&self, app: &str) -> String {
        self.privileged(&format!("rm -rf {}", shell_quote(&self.app_dir(app))))
    }

    pub fn list_apps(&self) -> String {
        format!("ls -1 {}", shell_quote(&self.apps_root))
    }

    /// Second phase of a two-phase transfer
    pub fn move_into_place(&self, staging: &str, destination: &str) -> String {
        self.privileged(&format!(
            "mv {} {}",
            shell_quote(staging),
            shell_quote(destination)
        ))
    }

    pub fn show_proxy(&self, app: &str) -> String {
        format!("cat {}", shell_quote(&self.proxy_entry(app)))
    }

    pub fn list_proxies(&self) -> String {
        format!("ls -1 {}", shell_quote(&self.sites_dir))
    }

    pub fn reload_proxy(&self) -> String {
        self.privileged(&self.reload_command)
    }

    pub fn remove_proxy(&self, app: &str) -> String {
        format!(
            "{} && {}",
            self.privileged(&format!("rm -f {}", shell_quote(&self.proxy_entry(app)))),
            self.reload_proxy()
        )
    }
}

fn join(dir: &str, name: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), name)
}

/// Quote a string for a POSIX shell (single quotes, `'` escaped)
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
