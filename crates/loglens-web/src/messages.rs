//! User-facing status messages. The operator audience is Korean, matching
//! the detector service's own responses.

pub const SELECT_TRAIN_FILE: &str = "학습할 로그 파일을 먼저 선택해주세요.";
pub const SELECT_DETECT_FILE: &str = "탐지할 로그 파일을 먼저 선택해주세요.";

pub const TRAIN_DONE: &str = "모델 학습이 성공적으로 완료되었습니다.";
pub const TRAIN_FAILED: &str = "모델 학습 중 오류가 발생했습니다.";
pub const TRAIN_BUSY: &str = "이미 진행 중인 학습 요청이 있습니다. 완료된 후 다시 시도해주세요.";

pub const DETECT_FAILED: &str = "이상 탐지 중 오류가 발생했습니다.";
pub const DETECT_BUSY: &str = "이미 진행 중인 탐지 요청이 있습니다. 완료된 후 다시 시도해주세요.";
pub const NO_ANOMALIES: &str = "탐지된 비정상 로그가 없습니다. 모든 로그가 정상 범위입니다.";

pub fn anomaly_count(count: usize) -> String {
    format!("총 {count}개의 비정상 로그가 탐지되었습니다.")
}
