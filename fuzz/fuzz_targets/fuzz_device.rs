#![no_main]

use std::io::SeekFrom;

use libfuzzer_sys::fuzz_target;

use fibdrv_device::FibDevice;

fuzz_target!(|data: &[u8]| {
    // Each 9-byte record is one seek (whence byte + i64 offset) followed by a read.
    let device = FibDevice::new(500);
    let mut handle = device.open().unwrap();
    let mut buf = [0u8; 64];

    for record in data.chunks_exact(9).take(32) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&record[1..]);
        let offset = i64::from_le_bytes(raw);
        let whence = match record[0] % 3 {
            0 => SeekFrom::Start(offset.unsigned_abs()),
            1 => SeekFrom::Current(offset),
            _ => SeekFrom::End(offset),
        };
        let pos = handle.seek(whence);
        assert!(pos <= device.max_offset());

        let copied = handle.read(&mut buf).unwrap();
        assert!(copied <= buf.len());
        assert_eq!(handle.position(), pos);
        assert!(buf[..copied].iter().all(u8::is_ascii_digit));
    }
});
