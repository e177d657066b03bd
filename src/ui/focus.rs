// Focus management for form screens

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFocus {
    #[default]
    Name,
    Email,
    Password,
}

impl AuthFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Password,
            Self::Email => Self::Name,
            Self::Password => Self::Email,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateFocus {
    #[default]
    Name,
    HouseType,
    Members,
}

impl CreateFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::HouseType,
            Self::HouseType => Self::Members,
            Self::Members => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Members,
            Self::HouseType => Self::Name,
            Self::Members => Self::HouseType,
        }
    }

    /// Text is being typed, so letter shortcuts are off
    pub fn is_editing(self) -> bool {
        self == Self::Name
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewChoreFocus {
    #[default]
    Title,
    Description,
    Assignee,
    Due,
}

impl NewChoreFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Assignee,
            Self::Assignee => Self::Due,
            Self::Due => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Due,
            Self::Description => Self::Title,
            Self::Assignee => Self::Description,
            Self::Due => Self::Assignee,
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Self::Title | Self::Description)
    }
}
