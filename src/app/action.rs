/// Side effects the event handler asks the main loop to perform.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Ring the terminal bell.
    Bell,
}
