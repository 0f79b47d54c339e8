use crate::api::capture::InvalidUpdate;
use crate::prelude::FlagValue;

// Plain text flags: every update replaces the previous value.
impl FlagValue for String {
    fn render(&self) -> String {
        self.clone()
    }

    fn update(&mut self, text: &str) -> Result<(), InvalidUpdate> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}
