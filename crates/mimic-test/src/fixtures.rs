//! Hand-built recordings

use mimic_core::{
    Frame, HandLandmark, Landmark, Point3, PoseLandmark, Sequence, Side, HAND_LANDMARKS,
};

/// Right arm only: shoulder, elbow, and a right hand collapsed onto the wrist.
/// Everything else is undetected.
pub fn arm_frame(shoulder: Point3, elbow: Point3, wrist: Point3) -> Frame {
    let mut frame = Frame::zeroed();
    frame.set(Landmark::pose(PoseLandmark::RightShoulder), shoulder);
    frame.set(Landmark::pose(PoseLandmark::RightElbow), elbow);
    for h in HandLandmark::all() {
        frame.set(Landmark::right(*h), wrist);
    }
    frame
}

/// The straight right arm along x: shoulder at the origin, elbow at 1, wrist at 2
pub fn straight_arm() -> Frame {
    arm_frame(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    )
}

/// Two frames: the shoulder slides by 0.1 and the upper arm stretches by 0.1
pub fn two_frame_arm() -> Sequence {
    let f0 = arm_frame(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    );
    let f1 = arm_frame(
        Point3::new(0.1, 0.0, 0.0),
        Point3::new(1.2, 0.0, 0.0),
        Point3::new(2.2, 0.0, 0.0),
    );
    Sequence::with_anchor(f0, [f1])
}

/// `len` frames with nothing detected
pub fn blank_sequence(len: usize) -> Sequence {
    Sequence::with_anchor(Frame::zeroed(), vec![Frame::zeroed(); len.saturating_sub(1)])
}

/// A plausible resting upper body with open hands, in normalized image
/// coordinates (x right, y down), facing the camera. Depth is left at 0.
pub fn rest_pose() -> Frame {
    use PoseLandmark::*;

    let mut frame = Frame::zeroed();
    let pose = [
        (Nose, 0.50, 0.30),
        (LeftEyeInner, 0.52, 0.28),
        (LeftEye, 0.53, 0.28),
        (LeftEyeOuter, 0.54, 0.28),
        (RightEyeInner, 0.48, 0.28),
        (RightEye, 0.47, 0.28),
        (RightEyeOuter, 0.46, 0.28),
        (LeftEar, 0.56, 0.29),
        (RightEar, 0.44, 0.29),
        (MouthLeft, 0.52, 0.33),
        (MouthRight, 0.48, 0.33),
        (LeftShoulder, 0.62, 0.45),
        (RightShoulder, 0.38, 0.45),
        (LeftElbow, 0.68, 0.60),
        (RightElbow, 0.32, 0.60),
        (LeftHip, 0.58, 0.80),
        (RightHip, 0.42, 0.80),
    ];
    for (landmark, x, y) in pose {
        frame.set(Landmark::pose(landmark), Point3::planar(x, y));
    }

    place_hand(&mut frame, Side::Left, Point3::planar(0.70, 0.72), 1.0);
    place_hand(&mut frame, Side::Right, Point3::planar(0.30, 0.72), -1.0);
    frame
}

/// Open hand hanging below `wrist`; `mirror` flips the thumb side
fn place_hand(frame: &mut Frame, side: Side, wrist: Point3, mirror: f64) {
    // Finger spread (x) and joint spacing (y) relative to the wrist
    const SPREAD: [f64; 5] = [0.025, 0.012, 0.0, -0.011, -0.020];
    const STEP: [f64; 5] = [0.012, 0.016, 0.017, 0.016, 0.013];

    frame.set(Landmark::Hand(side, HandLandmark::Wrist), wrist);
    for i in 1..HAND_LANDMARKS {
        let finger = (i - 1) / 4;
        let joint = ((i - 1) % 4 + 1) as f64;
        let Some(h) = HandLandmark::from_index(i) else {
            continue;
        };
        let p = Point3::planar(
            wrist.x + mirror * SPREAD[finger] * (1.0 + 0.3 * joint),
            wrist.y + 0.02 + STEP[finger] * joint,
        );
        frame.set(Landmark::Hand(side, h), p);
    }
}
