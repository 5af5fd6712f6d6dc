use std::io::{self, Write};

use crate::config::SeedConfig;
use crate::fixture::{self, MESSAGES, MESSAGES_MODULE, USERNAMES};
use crate::logger::trace;
use crate::sql::{self, insert_into, lookup_id, Value};

/// A titled group of statements. Titles become `-- ` comment lines on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub statements: Vec<String>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            statements: Vec::new(),
        }
    }

    fn push(&mut self, statement: impl ToString) {
        self.statements.push(statement.to_string());
    }
}

pub struct Seed<'a> {
    config: &'a SeedConfig,
}

impl<'a> Seed<'a> {
    pub fn new(config: &'a SeedConfig) -> Self {
        Self { config }
    }

    /// Database user, database and grant for every configured module.
    pub fn provision(&self) -> Vec<Section> {
        self.config
            .modules
            .iter()
            .map(|module| {
                let db = fixture::module_database(&module.name);
                let mut section = Section::new(format!("module {}", module.name));
                section.push(sql::create_user(&db, &self.config.module_password));
                section.push(sql::create_database(&db));
                section.push(sql::grant_all(&db, &db));
                section
            })
            .collect()
    }

    /// Core rows, then one user/message block for the extra domain and one
    /// for `host`. Domains precede users, users precede messages.
    pub fn populate(&self, host: &str) -> Vec<Section> {
        vec![
            self.core(host),
            self.fixtures(&self.config.extra_domain),
            self.fixtures(host),
        ]
    }

    fn core(&self, host: &str) -> Section {
        let cfg = self.config;
        let mut section = Section::new("core");
        section.push(sql::use_database(&cfg.core_database));
        for admin in &cfg.admins {
            let password = admin.password.as_deref().unwrap_or(&cfg.password_hash);
            section.push(
                insert_into("admins")
                    .value("username", Value::text(&admin.username))
                    .value("password", Value::text(password)),
            );
        }
        for module in &cfg.modules {
            section.push(
                insert_into("modules")
                    .value("name", Value::text(&module.name))
                    .value("connection_string", Value::text(&module.connection_string)),
            );
        }
        for domain in [host, cfg.extra_domain.as_str()] {
            section.push(insert_into("domains").value("name", Value::text(domain)));
        }
        section
    }

    fn fixtures(&self, host: &str) -> Section {
        let mut section = Section::new(format!("fixtures for {}", host));
        for username in USERNAMES {
            section.push(
                insert_into("users")
                    .value("username", Value::text(username))
                    .value("id_domains", lookup_id("domains", "name", host))
                    .value("visible_name", Value::text(fixture::address(username, host)))
                    .value("password", Value::text(&self.config.password_hash)),
            );
        }

        let table = format!("{}.messages", fixture::module_database(MESSAGES_MODULE));
        for m in MESSAGES.iter() {
            section.push(
                insert_into(table.as_str())
                    .value("id_users", Value::Int(m.owner))
                    .value("uid", Value::text(fixture::uid_token(m.uid, host)))
                    .value("address_from", Value::text(fixture::address(m.from, host)))
                    .value("address_to", Value::text(fixture::address(m.to, host)))
                    .value("message", Value::text(m.body))
                    .value("seen", Value::nullable(m.seen))
                    .value("created", Value::text(m.created)),
            );
        }
        section
    }
}

/// Populate statements for `hostname` with the built-in fixture constants.
pub fn generate(hostname: &str) -> Vec<String> {
    let config = SeedConfig::default();
    flatten(Seed::new(&config).populate(hostname))
}

/// Init statements with the built-in fixture constants.
pub fn provision() -> Vec<String> {
    let config = SeedConfig::default();
    flatten(Seed::new(&config).provision())
}

pub fn flatten(sections: Vec<Section>) -> Vec<String> {
    sections.into_iter().flat_map(|s| s.statements).collect()
}

pub fn write_sections<W: Write>(out: &mut W, sections: &[Section]) -> io::Result<()> {
    for section in sections {
        trace(&format!(
            "section '{}': {} statements",
            section.title,
            section.statements.len()
        ));
        writeln!(out, "-- {}", section.title)?;
        for statement in &section.statements {
            writeln!(out, "{}", statement)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
