/// Side effects requested by the event handler, performed by the main loop.
///
/// Every tap target in the mock is inert, so the only action left is
/// shutting the application down.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
}
