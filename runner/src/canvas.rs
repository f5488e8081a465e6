use glyph_brush::{
    ab_glyph::FontArc, BrushAction, BrushError, Extra, GlyphBrushBuilder, GlyphCruncher, Layout,
    Section, VerticalAlign,
};
use menukit_widgets::{Bounds, Canvas, CanvasError, Font, LinSrgba, Mouse, TextMetrics, Vec2};
use miniquad::*;

use crate::RenderingContext;

/// Instance buffer capacity. Larger batches are drawn in several calls.
const MAX_INSTANCES: usize = 1024;

const CLEAR_COLOR: LinSrgba = LinSrgba::new(0.9, 0.9, 0.9, 1.0);

#[derive(Clone)]
#[repr(C)]
struct Quad {
    rect: [f32; 4],
    uv: [f32; 4],
    color: [f32; 4],
}

type GlyphBrush = glyph_brush::GlyphBrush<(Quad, usize)>;

mod shader {
    use menukit_widgets::Vec2;
    use miniquad::*;

    pub const VERTEX: &str = r#"#version 100
    const vec2 FLIP_Y = vec2(1.0, -1.0);

    attribute vec2 vert_pos;

    attribute vec4 inst_rect;
    attribute vec4 inst_uv;
    attribute vec4 inst_color;

    uniform vec2 screen_size;

    varying lowp vec2 texcoord;
    varying lowp vec4 color;

    void main() {
        vec2 pos = inst_rect.xy + (vert_pos * inst_rect.zw);
        gl_Position = vec4((pos / screen_size * 2.0 - 1.0) * FLIP_Y, 0.0, 1.0);
        texcoord = inst_uv.xy + (vert_pos * inst_uv.zw);
        color = inst_color;
    }"#;

    // Solid quads sample a white mask, glyph quads sample the glyph cache.
    pub const FRAGMENT: &str = r#"#version 100
    varying lowp vec2 texcoord;
    varying lowp vec4 color;

    uniform sampler2D mask;

    void main() {
        mediump float alpha = texture2D(mask, texcoord).r;
        if (alpha <= 0.0) {
            discard;
        }
        gl_FragColor = color * vec4(1.0, 1.0, 1.0, alpha);
    }"#;

    pub fn meta() -> ShaderMeta {
        ShaderMeta {
            images: vec!["mask".to_string()],
            uniforms: UniformBlockLayout {
                uniforms: vec![UniformDesc::new("screen_size", UniformType::Float2)],
            },
        }
    }

    pub fn attributes() -> [VertexAttribute; 4] {
        [
            VertexAttribute::with_buffer("vert_pos", VertexFormat::Float2, 0),
            VertexAttribute::with_buffer("inst_rect", VertexFormat::Float4, 1),
            VertexAttribute::with_buffer("inst_uv", VertexFormat::Float4, 1),
            VertexAttribute::with_buffer("inst_color", VertexFormat::Float4, 1),
        ]
    }

    #[repr(C)]
    pub struct Uniforms {
        pub screen_size: Vec2,
    }
}

/// Keeps text drawn between two quads in its own layer so draw order is kept.
struct TextLayers {
    layer: usize,
    combine: bool,
}

impl TextLayers {
    fn new() -> Self {
        TextLayers {
            layer: 0,
            combine: true,
        }
    }
    fn next(&mut self) -> usize {
        if !self.combine {
            self.layer += 1;
            self.combine = true;
        }
        self.layer
    }
    fn split(&mut self) {
        self.combine = false;
    }
    fn reset(&mut self) {
        self.combine = true;
        self.layer = 0;
    }
}

/// Top, bottom, left and right bars of a stroke centred on the outline of
/// `rect`. The horizontal bars cover the corners.
fn stroke_edges(rect: Bounds, line_width: f32) -> [Bounds; 4] {
    let half = line_width / 2.;
    let (x, y, w, h) = (rect.x(), rect.y(), rect.width(), rect.height());
    [
        Bounds::new(x - half, y - half, w + line_width, line_width),
        Bounds::new(x - half, y + h - half, w + line_width, line_width),
        Bounds::new(x - half, y + half, line_width, h - line_width),
        Bounds::new(x + w - half, y + half, line_width, h - line_width),
    ]
}

enum Batch {
    Quads(std::ops::Range<usize>),
    Text(usize),
}

/// [`Canvas`] backed by a miniquad instanced quad pipeline and glyph_brush.
///
/// Draw calls are queued during the frame and flushed by
/// [`render_pass`](MenuCanvas::render_pass).
pub struct MenuCanvas {
    mouse: Mouse,
    fill: LinSrgba,
    stroke: LinSrgba,
    line_width: f32,
    font: Font,
    screen_size: Vec2,
    quads: Vec<Quad>,
    batches: Vec<Batch>,
    pipeline: Pipeline,
    vertex_buffer: BufferId,
    instance_buffer: BufferId,
    index_buffer: BufferId,
    white_pixel: TextureId,
    glyph_brush: GlyphBrush,
    glyph_texture: TextureId,
    text_layers: TextLayers,
    glyph_quads: Vec<Vec<Quad>>,
}

impl MenuCanvas {
    fn create_glyph_texture(
        context: &mut RenderingContext,
        (width, height): (u32, u32),
    ) -> TextureId {
        context.new_texture(
            TextureAccess::Static,
            TextureSource::Empty,
            TextureParams {
                kind: TextureKind::Texture2D,
                format: TextureFormat::Alpha,
                wrap: TextureWrap::Clamp,
                min_filter: FilterMode::Linear,
                mag_filter: FilterMode::Linear,
                mipmap_filter: MipmapFilterMode::None,
                width,
                height,
                allocate_mipmaps: false,
                sample_count: 1,
            },
        )
    }

    pub fn new(context: &mut RenderingContext, fonts: Vec<FontArc>) -> Result<Self, ShaderError> {
        let vertices: [Vec2; 4] = [
            Vec2::new(0., 0.),
            Vec2::new(1., 0.),
            Vec2::new(1., 1.),
            Vec2::new(0., 1.),
        ];
        let vertex_buffer = context.new_buffer(
            BufferType::VertexBuffer,
            BufferUsage::Immutable,
            BufferSource::slice(&vertices),
        );
        let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
        let index_buffer = context.new_buffer(
            BufferType::IndexBuffer,
            BufferUsage::Immutable,
            BufferSource::slice(&indices),
        );
        let instance_buffer = context.new_buffer(
            BufferType::VertexBuffer,
            BufferUsage::Stream,
            BufferSource::empty::<Quad>(MAX_INSTANCES),
        );

        let shader = context.new_shader(
            ShaderSource::Glsl {
                vertex: shader::VERTEX,
                fragment: shader::FRAGMENT,
            },
            shader::meta(),
        )?;
        let pipeline = context.new_pipeline(
            &[
                BufferLayout::default(),
                BufferLayout {
                    step_func: VertexStep::PerInstance,
                    ..Default::default()
                },
            ],
            &shader::attributes(),
            shader,
            PipelineParams {
                color_blend: Some(BlendState::new(
                    Equation::Add,
                    BlendFactor::Value(BlendValue::SourceAlpha),
                    BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
                )),
                ..Default::default()
            },
        );
        let white_pixel = context.new_texture_from_rgba8(1, 1, &[255; 4]);
        let glyph_brush = GlyphBrushBuilder::using_fonts(fonts).build();
        let glyph_texture = Self::create_glyph_texture(context, glyph_brush.texture_dimensions());

        Ok(MenuCanvas {
            mouse: Mouse::default(),
            fill: LinSrgba::new(0., 0., 0., 1.),
            stroke: LinSrgba::new(0., 0., 0., 1.),
            line_width: 1.,
            font: Font::default(),
            screen_size: Vec2::ONE,
            quads: Vec::new(),
            batches: Vec::new(),
            pipeline,
            vertex_buffer,
            instance_buffer,
            index_buffer,
            white_pixel,
            glyph_brush,
            glyph_texture,
            text_layers: TextLayers::new(),
            glyph_quads: Vec::new(),
        })
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_size = Vec2::new(width, height);
    }
    pub fn set_mouse(&mut self, mouse: Mouse) {
        self.mouse = mouse;
    }

    fn queue_quad(&mut self, rect: Bounds, color: LinSrgba) {
        if rect.width() <= 0. || rect.height() <= 0. {
            return;
        }
        if rect.right() < 0.
            || rect.bottom() < 0.
            || rect.x() >= self.screen_size.x
            || rect.y() >= self.screen_size.y
        {
            return;
        }

        self.text_layers.split();
        self.quads.push(Quad {
            rect: rect.into(),
            uv: [0., 0., 1., 1.],
            color: color.into(),
        });
        let end = self.quads.len();
        let mut appended = false;
        if let Some(Batch::Quads(range)) = self.batches.last_mut() {
            range.end = end;
            appended = true;
        }
        if !appended {
            self.batches.push(Batch::Quads(end - 1..end));
        }
    }

    fn section<'a>(&self, text: &'a str, x: f32, y: f32, color: LinSrgba, z: f32) -> Section<'a> {
        let text = glyph_brush::Text {
            text,
            scale: self.font.size.into(),
            font_id: self.font.id,
            extra: Extra {
                color: color.into(),
                z,
            },
        };
        Section {
            screen_position: (x, y),
            bounds: (f32::INFINITY, f32::INFINITY),
            layout: Layout::default_single_line().v_align(VerticalAlign::Top),
            text: vec![text],
        }
    }

    fn check_font(&self) -> Result<(), CanvasError> {
        if self.font.id.0 < self.glyph_brush.fonts().len() {
            Ok(())
        } else {
            Err(CanvasError::UnknownFont(self.font.id))
        }
    }

    fn process_queued_text(&mut self, context: &mut RenderingContext) {
        let brush_action = loop {
            let action = self.glyph_brush.process_queued(
                |rect, tex_data| {
                    context.texture_update_part(
                        self.glyph_texture,
                        rect.min[0] as i32,
                        rect.min[1] as i32,
                        rect.width() as i32,
                        rect.height() as i32,
                        tex_data,
                    );
                },
                |glyph_vertex| {
                    let pos = glyph_vertex.pixel_coords;
                    let uv = glyph_vertex.tex_coords;
                    (
                        Quad {
                            rect: [pos.min.x, pos.min.y, pos.width(), pos.height()],
                            uv: [uv.min.x, uv.min.y, uv.width(), uv.height()],
                            color: glyph_vertex.extra.color,
                        },
                        glyph_vertex.extra.z as usize,
                    )
                },
            );

            match action {
                Ok(action) => break action,
                Err(BrushError::TextureTooSmall { suggested, .. }) => {
                    log::info!("Resizing glyph texture to {}x{}", suggested.0, suggested.1);
                    context.delete_texture(self.glyph_texture);
                    self.glyph_texture = Self::create_glyph_texture(context, suggested);
                    self.glyph_brush.resize_texture(suggested.0, suggested.1);
                }
            }
        };

        // ReDraw means the queued text matches the previous frame.
        if let BrushAction::Draw(glyphs) = brush_action {
            self.glyph_quads.clear();
            self.glyph_quads
                .resize(self.text_layers.layer + 1, Vec::new());
            for (quad, layer) in glyphs {
                if let Some(quads) = self.glyph_quads.get_mut(layer) {
                    quads.push(quad);
                }
            }
        }
    }

    fn draw_instances(&self, context: &mut RenderingContext, instances: &[Quad]) {
        for chunk in instances.chunks(MAX_INSTANCES) {
            context.buffer_update(self.instance_buffer, BufferSource::slice(chunk));
            context.draw(0, 6, chunk.len() as i32);
        }
    }

    /// Flushes everything queued this frame to the default render pass.
    pub fn render_pass(&mut self, context: &mut RenderingContext) {
        let clear: [f32; 4] = CLEAR_COLOR.into();
        context.begin_default_pass(PassAction::clear_color(
            clear[0], clear[1], clear[2], clear[3],
        ));
        self.process_queued_text(context);
        context.apply_pipeline(&self.pipeline);
        context.apply_uniforms(UniformsSource::table(&shader::Uniforms {
            screen_size: self.screen_size,
        }));
        let mut bindings = Bindings {
            vertex_buffers: vec![self.vertex_buffer, self.instance_buffer],
            index_buffer: self.index_buffer,
            images: vec![self.white_pixel],
        };
        let batches = std::mem::take(&mut self.batches);
        for batch in batches {
            match batch {
                Batch::Quads(range) => {
                    bindings.images[0] = self.white_pixel;
                    context.apply_bindings(&bindings);
                    self.draw_instances(context, &self.quads[range]);
                }
                Batch::Text(layer) => {
                    bindings.images[0] = self.glyph_texture;
                    context.apply_bindings(&bindings);
                    if let Some(quads) = self.glyph_quads.get(layer) {
                        self.draw_instances(context, quads);
                    }
                }
            }
        }
        context.end_render_pass();
        self.quads.clear();
        self.text_layers.reset();
    }
}

impl Canvas for MenuCanvas {
    fn mouse(&self) -> &Mouse {
        &self.mouse
    }
    fn set_fill_color(&mut self, color: LinSrgba) {
        self.fill = color;
    }
    fn set_stroke_color(&mut self, color: LinSrgba) {
        self.stroke = color;
    }
    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }
    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn fill_rect(&mut self, rect: Bounds) {
        self.queue_quad(rect, self.fill);
    }

    fn stroke_rect(&mut self, rect: Bounds) {
        let color = self.stroke;
        for edge in stroke_edges(rect, self.line_width) {
            self.queue_quad(edge, color);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), CanvasError> {
        self.check_font()?;
        let layer = self.text_layers.next();
        let section = self.section(text, x, y, self.fill, layer as f32);
        self.glyph_brush.queue(section);
        if !matches!(self.batches.last(), Some(Batch::Text(_))) {
            self.batches.push(Batch::Text(layer));
        }
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, CanvasError> {
        self.check_font()?;
        let section = self.section(text, 0., 0., self.fill, 0.);
        let width = self
            .glyph_brush
            .glyph_bounds(&section)
            .map(|rect| rect.width())
            .unwrap_or(0.);
        Ok(TextMetrics {
            width,
            height: self.font.size,
        })
    }
}
