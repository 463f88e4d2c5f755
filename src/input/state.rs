/// Per-frame input snapshot fed to the world step.
///
/// `left`/`right`/`run` are held signals sampled once per frame;
/// `jump_pressed` is edge-triggered (true only on the frame the jump action
/// went down). How keys map to these is the embedder's business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub jump_pressed: bool,
}
