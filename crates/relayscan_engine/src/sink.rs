/// Line-oriented output target for rendered status blocks.
///
/// Each call receives the full block, one line per host, and replaces
/// whatever the previous call wrote.
pub trait RenderSink: Send + 'static {
    fn render(&mut self, lines: &[String]) -> std::io::Result<()>;
}
