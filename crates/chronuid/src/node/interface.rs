/// A trait for sources of node-identifying bytes.
///
/// The trailing bytes of every identifier carry caller- or randomly-supplied
/// distinguishing data. A node source is asked for fresh bytes once per
/// generated identifier; the buffer width (6, 7, or 8 bytes) is chosen by the
/// active layout.
///
/// Implementations that do not replay fixed bytes must draw from a
/// cryptographically strong random source, so that two independently running
/// processes have negligible collision probability.
///
/// # Example
///
/// ```
/// use chronuid::NodeSource;
///
/// struct Zeroed;
/// impl NodeSource for Zeroed {
///     fn fill_node(&self, node: &mut [u8]) {
///         node.fill(0);
///     }
/// }
///
/// let mut buf = [0xff; 6];
/// Zeroed.fill_node(&mut buf);
/// assert_eq!(buf, [0; 6]);
/// ```
pub trait NodeSource {
    /// Fills `node` with node-identifying bytes for one identifier.
    fn fill_node(&self, node: &mut [u8]);
}
