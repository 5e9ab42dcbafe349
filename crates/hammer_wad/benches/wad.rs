use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

/// Archive holding a single `size` by `size` mip texture named `BENCH`
fn get_input(size: u32) -> Vec<u8> {
    let mut lump = Vec::new();
    lump.extend_from_slice(b"BENCH\0\0\0\0\0\0\0\0\0\0\0");
    lump.extend_from_slice(&size.to_le_bytes());
    lump.extend_from_slice(&size.to_le_bytes());

    let mut offset = 40u32;
    for level in 0..4 {
        lump.extend_from_slice(&offset.to_le_bytes());
        offset += (size >> level) * (size >> level);
    }
    for level in 0..4 {
        let count = ((size >> level) * (size >> level)) as usize;
        lump.extend((0..count).map(|i| i as u8));
    }
    lump.extend_from_slice(&[0, 0]);
    lump.extend((0..256 * 3).map(|i| (i / 3) as u8));

    let mut wad = b"WAD3".to_vec();
    wad.extend_from_slice(&1u32.to_le_bytes());
    wad.extend_from_slice(&(12 + lump.len() as u32).to_le_bytes());

    let length = (lump.len() as u32).to_le_bytes();
    wad.extend_from_slice(&lump);
    wad.extend_from_slice(&12u32.to_le_bytes());
    wad.extend_from_slice(&length);
    wad.extend_from_slice(&length);
    wad.extend_from_slice(&[0x43, 0, 0, 0]);
    wad.extend_from_slice(b"BENCH\0\0\0\0\0\0\0\0\0\0\0");
    wad
}

pub mod read {
    use divan::Bencher;
    use hammer_wad::WadArchive;
    use std::io::Cursor;

    #[divan::bench]
    fn open(bencher: Bencher) {
        bencher
            .with_inputs(|| super::get_input(64))
            .bench_refs(|data| {
                divan::black_box(WadArchive::new(Cursor::new(data)).unwrap());
            });
    }

    #[divan::bench(args = [16, 128, 512])]
    fn decode_pixels(bencher: Bencher, size: u32) {
        let wad = WadArchive::new(Cursor::new(super::get_input(size))).unwrap();
        bencher.bench_local(move || {
            divan::black_box(wad.decode_pixels("BENCH").unwrap());
        });
    }
}
