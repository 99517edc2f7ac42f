/// The application logic hook invoked once per launch.
///
/// Takes no input and reports plain success or failure. Any closure
/// returning `anyhow::Result<()>` is a delegate.
pub trait Delegate {
    fn run(&mut self) -> anyhow::Result<()>;
}

impl<F> Delegate for F
where
    F: FnMut() -> anyhow::Result<()>,
{
    fn run(&mut self) -> anyhow::Result<()> {
        self()
    }
}
