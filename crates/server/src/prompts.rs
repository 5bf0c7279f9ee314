use shared::domain::Target;

/// System prompt instructing the model how to rewrite for `target`.
pub fn system_prompt(target: Target) -> &'static str {
    match target {
        Target::Upward => {
            "당신은 직장 상사에게 보고하기 위한 정중하고 전문적인 비즈니스 문서를 작성하는 AI 어시스턴트입니다. \
             다음 텍스트를 상사에게 보고하는 상황에 맞게, 결론부터 명확하게, 정중한 격식체로 수정해주세요."
        }
        Target::Lateral => {
            "당신은 다른 팀의 동료에게 협업을 요청하기 위한 명확하고 친절한 비즈니스 이메일을 작성하는 AI 어시스턴트입니다. \
             다음 텍스트를 동료에게 업무 협조를 구하는 상황에 맞게, 요청사항과 배경을 명확히 전달하는 상호 존중적인 어투로 수정해주세요."
        }
        Target::External => {
            "당신은 고객에게 보내는 공식적이고 신뢰감 있는 비즈니스 안내문을 작성하는 AI 어시스턴트입니다. \
             다음 텍스트를 고객에게 안내하는 상황에 맞게, 극존칭을 사용하고 전문성이 드러나는 정중한 어투로 수정해주세요."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_has_a_distinct_prompt() {
        let prompts: Vec<_> = Target::ALL.into_iter().map(system_prompt).collect();
        assert_eq!(prompts.len(), 3);
        assert!(prompts.iter().all(|p| !p.is_empty()));
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
        assert!(system_prompt(Target::External).contains("고객"));
    }
}
