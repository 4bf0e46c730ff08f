/// Training progress over one reporting window.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one value every `report_every` steps and one after the final
/// step. A caller drawing a live decision map can redraw on each value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStats {
    /// Steps completed so far in this call.
    pub step: usize,
    pub total_steps: usize,
    /// Steps in the window this value summarises.
    pub window: usize,
    /// Mean squared output error over the window, measured before each update.
    pub mean_squared_error: f64,
}
