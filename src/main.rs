use anyhow::Result;
use derive_more::Display;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use signup_form::consts::LOG_FILE;
use signup_form::{Field, FormCoordinator, LogSubmitter, SecretField, SubmitOutcome};
use strum::IntoEnumIterator;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs the menu once. Returns None when the menu wants to stop,
    /// Some(()) to be run again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it stops, printing errors on the way.
    /// Ctrl-C stops it as well.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                if let Some(InquireError::OperationInterrupted) = error.downcast_ref::<InquireError>() {
                    break;
                }
                eprintln!("Error: {error}");
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Display)]
enum Choice {
    #[display("Edit {_0}")]
    Edit(Field),
    #[display("Show/hide {_0}")]
    ToggleVisibility(SecretField),
    #[display("Submit")]
    Submit,
    #[display("Reset")]
    Reset,
    #[display("Quit")]
    Exit,
}

pub struct App {
    form: FormCoordinator<LogSubmitter>,
}

impl App {
    pub fn new(form: FormCoordinator<LogSubmitter>) -> Self {
        App { form }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Welcome, #FutureSharper");
        self.enter_loop();
        Ok(())
    }

    /// Submit is only offered once the form is valid
    fn choices(&self) -> Vec<Choice> {
        let mut choices: Vec<Choice> = Field::iter()
            .map(Choice::Edit)
            .chain(SecretField::iter().map(Choice::ToggleVisibility))
            .collect();
        if self.form.is_form_valid() {
            choices.push(Choice::Submit);
        }
        choices.push(Choice::Reset);
        choices.push(Choice::Exit);
        choices
    }

    /// Prompts for a field. Leaving the prompt with Esc only blurs it.
    fn edit(&mut self, field: Field) -> Result<()> {
        let message = format!("{field}:");
        let entered = match field.secret() {
            Some(secret) => {
                let display_mode = if self.form.is_visible(secret) {
                    PasswordDisplayMode::Full
                } else {
                    PasswordDisplayMode::Masked
                };
                Password::new(&message)
                    .without_confirmation()
                    .with_display_mode(display_mode)
                    .prompt_skippable()?
            }
            None => Text::new(&message)
                .with_initial_value(self.form.value(field))
                .prompt_skippable()?,
        };

        if let Some(value) = entered {
            self.form.change(field, value);
        }
        self.form.blur(field);
        Ok(())
    }

    fn print_summary(&self) {
        println!();
        for field in Field::iter() {
            let value = self.form.value(field);
            let shown = match field.secret() {
                Some(secret) if !self.form.is_visible(secret) => "*".repeat(value.chars().count()),
                _ => value.to_owned(),
            };
            println!("{field}: {shown} [{}]", self.form.status(field));
            for advisory in self.form.advisories(field) {
                println!("    - {advisory}");
            }
        }

        if self.form.is_form_valid() {
            println!("\n[*] Ready to submit");
        }
        println!();
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        self.print_summary();

        let Some(choice) = Select::new("What do you want to do ?", self.choices())
            .prompt_skippable()?
        else {
            return Ok(MENU_EXIT);
        };

        match choice {
            Choice::Edit(field) => self.edit(field)?,
            Choice::ToggleVisibility(secret) => self.form.toggle_visibility(secret),
            Choice::Submit => match self.form.submit()? {
                SubmitOutcome::Submitted => println!("[*] Submitted!"),
                SubmitOutcome::Ignored => println!("[!] The form is not valid"),
            },
            Choice::Reset => self.form.reset(),
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> anyhow::Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    App::new(FormCoordinator::new(LogSubmitter)).start()
}
