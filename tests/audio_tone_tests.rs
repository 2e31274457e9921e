//! Tone synthesis tests

use rust_core2_sounds::audio::tone::{
    render, ToneParams, MAX_DURATION_MS, MAX_FREQ_HZ, MAX_VOLUME_PERCENT, MIN_DURATION_MS,
    MIN_FREQ_HZ, SAMPLE_RATE_HZ,
};

#[test]
fn test_params_clamped_up_to_minimums() {
    let clamped = ToneParams::new(500, 50, 80).clamped();
    assert_eq!(clamped, ToneParams::new(MIN_FREQ_HZ, MIN_DURATION_MS, 80));
}

#[test]
fn test_params_clamped_down_to_maximums() {
    let clamped = ToneParams::new(9_000, 5_000, 150).clamped();
    assert_eq!(
        clamped,
        ToneParams::new(MAX_FREQ_HZ, MAX_DURATION_MS, MAX_VOLUME_PERCENT)
    );
}

#[test]
fn test_params_in_range_untouched() {
    let params = ToneParams::new(2_000, 250, 70);
    assert_eq!(params.clamped(), params);

    // Boundary values are already valid
    let low = ToneParams::new(MIN_FREQ_HZ, MIN_DURATION_MS, 0);
    assert_eq!(low.clamped(), low);
    let high = ToneParams::new(MAX_FREQ_HZ, MAX_DURATION_MS, MAX_VOLUME_PERCENT);
    assert_eq!(high.clamped(), high);
}

#[test]
fn test_peak_amplitude() {
    assert_eq!(ToneParams::new(1_000, 100, 100).peak_amplitude(), i16::MAX);
    assert_eq!(ToneParams::new(1_000, 100, 50).peak_amplitude(), 16_383);
    assert_eq!(ToneParams::new(1_000, 100, 1).peak_amplitude(), 327);
    assert_eq!(ToneParams::new(1_000, 100, 0).peak_amplitude(), 0);
}

#[test]
fn test_sample_count() {
    assert_eq!(ToneParams::new(1_000, 1_000, 100).sample_count(), 44_100);
    assert_eq!(ToneParams::new(1_000, 250, 100).sample_count(), 11_025);
    assert_eq!(ToneParams::new(1_000, 100, 100).sample_count(), 4_410);
}

#[test]
fn test_render_length_matches_duration() {
    let pcm = render(ToneParams::new(1_000, 1_000, 100)).unwrap();
    assert_eq!(pcm.len(), SAMPLE_RATE_HZ as usize);

    let pcm = render(ToneParams::new(3_000, 200, 50)).unwrap();
    assert_eq!(pcm.len(), 8_820);
}

#[test]
fn test_render_clamps_like_the_nearest_valid_request() {
    // An out-of-range request degrades to the nearest valid tone
    let clamped = render(ToneParams::new(500, 50, 150)).unwrap();
    let floor = render(ToneParams::new(1_000, 100, 100)).unwrap();
    assert_eq!(clamped, floor);
}

#[test]
fn test_render_zero_volume_is_silence() {
    let pcm = render(ToneParams::new(3_000, 200, 0)).unwrap();
    assert_eq!(pcm.len(), 8_820);
    assert!(pcm.iter().all(|&s| s == 0));
}

#[test]
fn test_render_is_deterministic() {
    let a = render(ToneParams::new(2_500, 120, 80)).unwrap();
    let b = render(ToneParams::new(2_500, 120, 80)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_render_envelope_shape() {
    let pcm = render(ToneParams::new(1_000, 1_000, 100)).unwrap();
    let len = pcm.len();

    // Fade-in: silent start, every sample bounded by the ramp gain
    assert_eq!(pcm[0], 0);
    for i in 0..100 {
        let bound = 32_767 * i as i32 / 100;
        assert!(
            i32::from(pcm[i]).abs() <= bound,
            "sample {} above the ramp",
            i
        );
    }

    // Sustain reaches the requested peak (the angle grid hits the crest)
    let sustain_peak = pcm[100..len - 1000]
        .iter()
        .map(|&s| i32::from(s).abs())
        .max()
        .unwrap();
    assert_eq!(sustain_peak, 32_767);

    // Fade-out: the final sample is within one thousandth of full scale
    assert!(i32::from(pcm[len - 1]).abs() <= 33);
}

#[test]
fn test_render_respects_volume_ceiling() {
    let pcm = render(ToneParams::new(2_000, 500, 50)).unwrap();
    let peak = ToneParams::new(2_000, 500, 50).peak_amplitude();

    for (i, &s) in pcm.iter().enumerate() {
        assert!(
            i32::from(s).abs() <= i32::from(peak),
            "sample {} louder than the requested volume",
            i
        );
    }
}

#[test]
fn test_render_oscillates_at_the_requested_pitch() {
    // 1 kHz at 44100 Hz is 44.1 samples per cycle: every 45-sample
    // sustain window must see both a crest and a trough
    let pcm = render(ToneParams::new(1_000, 1_000, 100)).unwrap();

    for (w, window) in pcm[100..4_600].chunks(45).enumerate() {
        if window.len() < 45 {
            continue;
        }
        assert!(
            window.iter().any(|&s| s > 16_000),
            "window {} has no crest",
            w
        );
        assert!(
            window.iter().any(|&s| s < -16_000),
            "window {} has no trough",
            w
        );
    }
}
