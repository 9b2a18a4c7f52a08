use crate::app::form::FormState;

#[derive(Debug)]
pub enum Action {
    /// Hand a validated form to the submission collaborator.
    Submit { form: FormState },
    Quit,
}
