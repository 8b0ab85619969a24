//! Built-in schema tables for the KMS-Tools pages.

#![allow(missing_docs)]

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::error::SchemaError;
use crate::field::FieldDescriptor;
use crate::schema::Schema;

const BROWSERS: &[&str] = &["CHROME", "DEFAULT", "EDGE", "FIREFOX", "NONE"];

const LOG_LEVELS: &[&str] = &["DEBUG", "ERROR", "INFO", "NOISE", "NONE", "WARNING"];

const TIMEOUT_MAX_MS: i64 = 3_600_000;

const KMS_ARGUMENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::flag("AddToPath"),
    FieldDescriptor::list("ConfigFiles"),
    FieldDescriptor::flag("DisplayConfig"),
    FieldDescriptor::flag("Help"),
    FieldDescriptor::choice("Log_ConsoleLevel", LOG_LEVELS)
        .with_message("DEBUG | ERROR | INFO | NOISE | NONE | WARNING"),
    FieldDescriptor::folder("Log_Folder"),
    FieldDescriptor::list("OptionalConfigFiles"),
    FieldDescriptor::file("SaveConfig"),
    FieldDescriptor::flag("Stats_Console"),
    FieldDescriptor::folder("Stats_Folder"),
    FieldDescriptor::flag("Uninstall"),
];

const LAUNCHER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::list("AllowedRanges").with_message("Address ranges allowed to connect"),
    FieldDescriptor::choice("Browser.Prefered", BROWSERS)
        .with_message("CHROME | DEFAULT | EDGE | FIREFOX | NONE"),
    FieldDescriptor::file("Exec").mandatory(),
    FieldDescriptor::folder("FileServer.Root"),
    FieldDescriptor::flag("FileServer.Verbose"),
    FieldDescriptor::text("Page"),
    FieldDescriptor::list("Routes"),
    FieldDescriptor::flag("Socket.KeepALive"),
    FieldDescriptor::text("Socket.LocalAddress"),
    FieldDescriptor::flag("Socket.NoDelay"),
    FieldDescriptor::numeric("Socket.ReceiveTimeout", 0, TIMEOUT_MAX_MS, Some("ms")),
    FieldDescriptor::flag("Socket.ReuseAddr"),
    FieldDescriptor::numeric("Socket.SendTimeout", 0, TIMEOUT_MAX_MS, Some("ms")),
    FieldDescriptor::text("Title"),
];

const COM_TOOL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::file("DataFile").with_message("Received data is written here"),
    FieldDescriptor::text("Port").with_message("COM port name"),
];

const WOP_TOOL_FIELDS: &[FieldDescriptor] =
    &[FieldDescriptor::text("Port").with_message("COM port name")];

const LAUNCHER_PARAMETER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::flag("Detach"),
    FieldDescriptor::flag("Exit"),
    FieldDescriptor::folder("WorkingDirectory"),
];

/// Shared argument group appended to every page.
pub static KMS_ARGUMENTS: Schema = Schema::from_table("KMS Arguments", KMS_ARGUMENT_FIELDS);

pub static LAUNCHER: Schema = Schema::from_table("Launcher", LAUNCHER_FIELDS);

pub static COM_TOOL: Schema = Schema::from_table("ComTool", COM_TOOL_FIELDS);

pub static MODBUS_SIM: Schema = Schema::from_table("ModbusSim", &[]);

pub static MODBUS_TOOL: Schema = Schema::from_table("ModbusTool", &[]);

pub static WOP_TOOL: Schema = Schema::from_table("WOP-Tool", WOP_TOOL_FIELDS);

/// Detach / Exit / WorkingDirectory, edited next to every page.
pub static LAUNCHER_PARAMETERS: Schema =
    Schema::from_table("Launcher Parameters", LAUNCHER_PARAMETER_FIELDS);

/// One page of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    ComTool,
    Launcher,
    ModbusSim,
    ModbusTool,
    WopTool,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::ComTool,
        Page::Launcher,
        Page::ModbusSim,
        Page::ModbusTool,
        Page::WopTool,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        self.schema().title()
    }

    #[must_use]
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::ComTool => &COM_TOOL,
            Self::Launcher => &LAUNCHER,
            Self::ModbusSim => &MODBUS_SIM,
            Self::ModbusTool => &MODBUS_TOOL,
            Self::WopTool => &WOP_TOOL,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = SchemaError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let wanted = text.trim().replace('-', "");
        Page::ALL
            .into_iter()
            .find(|page| page.name().replace('-', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| SchemaError::UnknownPage(SmolStr::new(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_tables_are_valid() {
        for schema in [
            &KMS_ARGUMENTS,
            &LAUNCHER,
            &COM_TOOL,
            &MODBUS_SIM,
            &MODBUS_TOOL,
            &WOP_TOOL,
            &LAUNCHER_PARAMETERS,
        ] {
            schema.validate().unwrap();
        }
    }

    #[test]
    fn page_names_resolve_loosely() {
        assert_eq!("launcher".parse::<Page>().unwrap(), Page::Launcher);
        assert_eq!("WOP-Tool".parse::<Page>().unwrap(), Page::WopTool);
        assert_eq!("WOPTool".parse::<Page>().unwrap(), Page::WopTool);
        assert_eq!(" modbussim ".parse::<Page>().unwrap(), Page::ModbusSim);
        assert_eq!(
            "Soon".parse::<Page>().unwrap_err(),
            SchemaError::UnknownPage(SmolStr::new("Soon"))
        );
    }

    #[test]
    fn only_exec_is_mandatory() {
        let mandatory: Vec<_> = Page::ALL
            .iter()
            .flat_map(|page| page.schema().iter())
            .chain(KMS_ARGUMENTS.iter())
            .filter(|field| field.mandatory)
            .map(|field| field.name)
            .collect();
        assert_eq!(mandatory, ["Exec"]);
    }
}
