//! Per-page form: the page fields, the KMS Arguments group and the launcher
//! parameters, each owned by the page.

#![allow(missing_docs)]

use tracing::debug;

use crate::advisory::{check, Advisory};
use crate::catalog::{Page, KMS_ARGUMENTS, LAUNCHER_PARAMETERS};
use crate::codec::{encode, extract_state, matches_field};
use crate::error::FormError;
use crate::form::FormState;
use crate::request::{LaunchParameters, LaunchRequest};
use crate::schema::Schema;

/// Which group of a page an edit is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Page,
    Kms,
    Launcher,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageForm {
    page: Page,
    fields: FormState,
    kms: FormState,
    launcher: FormState,
}

impl PageForm {
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            fields: FormState::new(page.schema()),
            kms: FormState::new(&KMS_ARGUMENTS),
            launcher: FormState::new(&LAUNCHER_PARAMETERS),
        }
    }

    /// Seeds the page and KMS groups from a previously built token sequence.
    pub fn seeded<S: AsRef<str>>(page: Page, tokens: &[S]) -> Self {
        debug!(page = page.name(), tokens = tokens.len(), "seeding form");
        Self {
            page,
            fields: extract_state(tokens, page.schema()),
            kms: extract_state(tokens, &KMS_ARGUMENTS),
            launcher: FormState::new(&LAUNCHER_PARAMETERS),
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn schema(&self, group: Group) -> &'static Schema {
        match group {
            Group::Page => self.page.schema(),
            Group::Kms => &KMS_ARGUMENTS,
            Group::Launcher => &LAUNCHER_PARAMETERS,
        }
    }

    #[must_use]
    pub fn state(&self, group: Group) -> &FormState {
        match group {
            Group::Page => &self.fields,
            Group::Kms => &self.kms,
            Group::Launcher => &self.launcher,
        }
    }

    pub fn state_mut(&mut self, group: Group) -> &mut FormState {
        match group {
            Group::Page => &mut self.fields,
            Group::Kms => &mut self.kms,
            Group::Launcher => &mut self.launcher,
        }
    }

    /// Applies a textual edit to the group owning the field.
    ///
    /// Page fields shadow KMS fields of the same name.
    pub fn apply(&mut self, edit: &str) -> Result<(), FormError> {
        let name = edit_name(edit);
        let group = [Group::Page, Group::Kms, Group::Launcher]
            .into_iter()
            .find(|group| self.schema(*group).field(name).is_some())
            .unwrap_or(Group::Page);
        self.state_mut(group).apply(edit)
    }

    /// Tokens of the page group followed by the KMS group.
    #[must_use]
    pub fn arguments(&self) -> Vec<String> {
        let mut tokens = encode(self.page.schema(), &self.fields);
        tokens.extend(encode(&KMS_ARGUMENTS, &self.kms));
        tokens
    }

    #[must_use]
    pub fn parameters(&self) -> LaunchParameters {
        LaunchParameters::from_state(&self.launcher)
    }

    #[must_use]
    pub fn request(&self) -> LaunchRequest {
        LaunchRequest::build(self.page.schema(), &self.fields, &self.kms, &self.parameters())
    }

    #[must_use]
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = check(self.page.schema(), &self.fields);
        advisories.extend(check(&KMS_ARGUMENTS, &self.kms));
        advisories.extend(check(&LAUNCHER_PARAMETERS, &self.launcher));
        advisories
    }

    /// Tokens recognised by neither the page nor the KMS group.
    pub fn foreign<'t, S: AsRef<str>>(&self, tokens: &'t [S]) -> Vec<&'t str> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| {
                !self
                    .page
                    .schema()
                    .iter()
                    .chain(KMS_ARGUMENTS.iter())
                    .any(|field| matches_field(field, token))
            })
            .collect()
    }
}

fn edit_name(edit: &str) -> &str {
    let head = edit.split_once('=').map_or(edit, |(head, _)| head);
    head.strip_suffix('+').unwrap_or(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_reach_the_owning_group() {
        let mut form = PageForm::new(Page::Launcher);
        form.apply("Exec=tool.exe").unwrap();
        form.apply("Help").unwrap();
        form.apply("Exit").unwrap();

        assert_eq!(form.state(Group::Page).scalar("Exec"), "tool.exe");
        assert!(form.state(Group::Kms).flag("Help"));
        assert!(form.parameters().exit);
        assert_eq!(form.arguments(), ["Exec=tool.exe", "Help"]);
    }

    #[test]
    fn port_is_a_page_field_on_com_tool() {
        let mut form = PageForm::new(Page::ComTool);
        form.apply("Port=COM3").unwrap();
        assert_eq!(form.arguments(), ["Port=COM3"]);
    }

    #[test]
    fn unknown_field_is_reported_against_the_page() {
        let mut form = PageForm::new(Page::ModbusSim);
        assert_eq!(
            form.apply("Exec=tool.exe"),
            Err(FormError::UnknownField("Exec".into()))
        );
    }

    #[test]
    fn seeding_splits_tokens_between_groups() {
        let tokens = ["Title=Demo", "Log_ConsoleLevel=INFO", "Stray=1"];
        let form = PageForm::seeded(Page::Launcher, &tokens);
        assert_eq!(form.state(Group::Page).scalar("Title"), "Demo");
        assert_eq!(form.state(Group::Kms).scalar("Log_ConsoleLevel"), "INFO");
        assert_eq!(form.foreign(&tokens), ["Stray=1"]);
    }
}
