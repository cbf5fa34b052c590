use typed_builder::TypedBuilder;

/// Register state applied after a machine reset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum BootState {
    /// Everything zeroed, CPU in STOP.
    #[default]
    PowerOn,
    /// Registers as the DMG boot ROM leaves them at 0x0100, CPU running.
    DmgPostBoot,
}

#[derive(Clone, Debug, TypedBuilder)]
pub struct MachineConfig {
    #[builder(default)]
    pub boot: BootState,
    /// Where `Machine::load_program` places the image and points PC.
    #[builder(default = 0x0000)]
    pub origin: u16,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
