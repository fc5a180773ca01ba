#![no_main]

use libfuzzer_sys::fuzz_target;

use pacecalc_core::generate_strategies;

fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    // First 4 bytes: seconds, capped at a week. Next 8: distance, capped at 1000 km.
    let secs = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 604_800;
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[4..12]);
    let km = f64::from_le_bytes(raw);
    let km = if km.is_finite() { km % 1000.0 } else { km };

    let strategies = generate_strategies(secs, km);
    if secs == 0 || !km.is_finite() || km <= 0.0 {
        assert!(strategies.is_empty());
    } else {
        assert_eq!(strategies.len(), 4);
        for s in &strategies {
            assert_eq!(s.splits.len() as f64, km.floor());
        }
    }
});
