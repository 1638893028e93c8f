use fnv::FnvHashMap;
use hero_core::mesh;
use hero_core::MeshKind;
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
}

const ALL_KINDS: [MeshKind; 5] = [
    MeshKind::Sphere,
    MeshKind::Torus,
    MeshKind::Cube,
    MeshKind::RoundedBox,
    MeshKind::Quad,
];

/// Upload one shared buffer pair per mesh kind.
pub(crate) fn upload_all(device: &wgpu::Device) -> FnvHashMap<MeshKind, GpuMesh> {
    let mut meshes = FnvHashMap::default();
    for kind in ALL_KINDS {
        let data = mesh::build(kind);
        let label = format!("{kind:?}");
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_vb")),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_ib")),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        log::debug!("[gpu] {label}: {} triangles", data.triangle_count());
        meshes.insert(
            kind,
            GpuMesh {
                vertices,
                indices,
                index_count: data.indices.len() as u32,
            },
        );
    }
    meshes
}
