use std::mem;

/// One corner of the triangle: 2D clip-space position plus vertex color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    position: [f32; 2],
    color: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

// Y-up, listed clockwise to match the pipeline's front face.
pub const VERTICES: &[Vertex] = &[
    Vertex {
        position: [0.8, -0.8],
        color: [0.0, 1.0, 0.0],
    }, // bottom right
    Vertex {
        position: [-0.8, -0.8],
        color: [0.0, 0.0, 1.0],
    }, // bottom left
    Vertex {
        position: [0.0, 0.8],
        color: [1.0, 0.0, 0.0],
    }, // top
];

/// 3 real indices plus one padding entry; index buffer byte sizes must be a
/// multiple of 4.
pub const INDICES: &[u16] = &[0, 1, 2, 0];

/// Number of indices actually drawn (the padding entry is never referenced).
pub const INDEX_COUNT: u32 = 3;

/// Per-frame uniform block at `@group(0) @binding(0)`, padded out to the
/// 16-byte uniform buffer alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OffsetUniform {
    position: [f32; 2],
    _padding: [f32; 2],
}

/// Horizontal distance moved per frame.
pub const STEP: f32 = 0.015;

/// Travel bound for the offset: 1.0 minus the triangle's 0.8 half-width.
pub const TRAVEL_BOUND: f32 = 0.2;

/// Horizontal slide that reverses direction after crossing the travel bound.
#[derive(Debug)]
pub struct Bounce {
    offset: (f32, f32),
    step: f32,
}

impl Bounce {
    pub fn new() -> Self {
        Self {
            offset: (0.0, 0.0),
            step: STEP,
        }
    }

    /// Moves one frame forward. The offset may land at most one step past the
    /// bound; the reversed step takes effect on the following frame.
    pub fn advance(&mut self) {
        self.offset.0 += self.step;
        if self.offset.0 > TRAVEL_BOUND || self.offset.0 < -TRAVEL_BOUND {
            self.step = -self.step;
        }
    }

    pub fn uniform(&self) -> OffsetUniform {
        OffsetUniform {
            position: [self.offset.0, self.offset.1],
            _padding: [0.0; 2],
        }
    }
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_size_is_a_multiple_of_16() {
        assert_eq!(mem::size_of::<OffsetUniform>() % 16, 0);
    }

    #[test]
    fn index_data_is_4_byte_aligned() {
        assert_eq!(INDICES.len(), 4);
        assert_eq!(mem::size_of_val(INDICES) % 4, 0);
        // The padding entry only repeats a real index.
        assert!(INDICES[3] < INDEX_COUNT as u16);
    }

    #[test]
    fn vertex_stride_matches_the_advertised_layout() {
        assert_eq!(mem::size_of::<Vertex>(), 5 * mem::size_of::<f32>());
        assert_eq!(Vertex::desc().array_stride, 20);
        assert_eq!(Vertex::desc().attributes.len(), 2);
    }

    #[test]
    fn offset_stays_inside_the_travel_envelope() {
        let mut bounce = Bounce::new();
        for _ in 0..10_000 {
            bounce.advance();
            // Move-then-reverse: at most one step of overshoot past the bound.
            assert!(bounce.offset.0.abs() <= TRAVEL_BOUND + STEP + f32::EPSILON);
            assert_eq!(bounce.offset.1, 0.0);
        }
    }

    #[test]
    fn step_reverses_exactly_when_the_bound_is_crossed() {
        let mut bounce = Bounce::new();
        // Frames 1..=13 stay inside the bound and keep moving right.
        for frame in 1..=13 {
            bounce.advance();
            assert!(
                bounce.offset.0 <= TRAVEL_BOUND,
                "frame {frame} left the bound early"
            );
            assert_eq!(bounce.step, STEP);
        }
        // Frame 14 crosses 0.2 and flips the step for the next frame.
        bounce.advance();
        assert!(bounce.offset.0 > TRAVEL_BOUND);
        assert_eq!(bounce.step, -STEP);
    }

    #[test]
    fn bounce_is_symmetric() {
        let mut bounce = Bounce::new();
        // Ride out the first reversal, then keep going until the left bound.
        while bounce.step > 0.0 {
            bounce.advance();
        }
        while bounce.step < 0.0 {
            bounce.advance();
            assert!(bounce.offset.0 >= -(TRAVEL_BOUND + STEP + f32::EPSILON));
        }
        assert!(bounce.offset.0 < -TRAVEL_BOUND);
        assert_eq!(bounce.step, STEP);
    }

    #[test]
    fn uniform_reflects_the_current_offset() {
        let mut bounce = Bounce::new();
        assert_eq!(bounce.uniform().position, [0.0, 0.0]);
        bounce.advance();
        assert_eq!(bounce.uniform().position, [STEP, 0.0]);
        assert_eq!(bounce.uniform()._padding, [0.0, 0.0]);
    }
}
