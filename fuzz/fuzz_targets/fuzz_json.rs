#![no_main]

use libfuzzer_sys::fuzz_target;
use reservoir_volumetrics::analysis::calculate;
use reservoir_volumetrics::io::read_json_str;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(inputs) = read_json_str(content) {
            // Validated scenarios either calculate to finite volumes or
            // are rejected for overflow
            if let Ok(result) = calculate(&inputs) {
                assert!(result.pore_volume >= result.hydrocarbon_pore_volume);
                assert!(result.in_place_volume.is_finite());
            }
        }
    }
});
