#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = ppmview_ppm::PPMDecoder::new(data);
    if let Ok(pixels) = decoder.decode() {
        // anything we decode must survive a round trip through both encoders
        for version in [ppmview_ppm::PPMVersions::P3, ppmview_ppm::PPMVersions::P6] {
            let mut sink = Vec::new();
            ppmview_ppm::PPMEncoder::new(&mut sink)
                .encode(&pixels, version)
                .unwrap();
            let decoded = ppmview_ppm::PPMDecoder::new(&sink).decode().unwrap();
            assert!(decoded == pixels);
        }
    }
});
